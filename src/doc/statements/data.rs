/*!
# `DATA <item>[,<item>...]`

## Purpose
Constants embedded in the program for `READ` to pick up.

## Remarks
Items from every `DATA` statement are gathered in line order when the
program starts with `RUN`. Quoted items keep everything between the
quotes, commas included. Unquoted items are trimmed and converted when
they are read into a numeric variable. Executing `DATA` does nothing.

## Example
```text
10 FOR I=1 TO 3:READ P$,Q
20 PRINT P$;Q*2
30 NEXT
40 DATA APPLE,1,"PEAR, RIPE",2
50 DATA PLUM,3
RUN
APPLE 2
PEAR, RIPE 4
PLUM 6
```

*/
