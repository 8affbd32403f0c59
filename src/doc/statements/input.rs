/*!
# `INPUT ["<prompt string>";]<variable>[,<variable>...]`

## Purpose
Ask the operator for values.

## Remarks
Each variable gets its own line of input and its own `? ` prompt.
A numeric variable takes the number at the start of the response,
or zero when there isn't one. A string variable takes the whole line.

## Example
```text
10 INPUT "WIDTH"; W
20 INPUT "HEIGHT"; H
30 PRINT "AREA" W*H
```

*/
